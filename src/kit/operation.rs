crate::define_id_enum! {
    /// Operation name accepted by `Component::invoke`
    Operation {
        Render => "render",
        CalculateArea => "calculateArea" | "calculate_area" | "calculate-area",
        Draw => "draw",
        ProcessPayment => "processPayment" | "process_payment" | "process-payment",
        Attack => "attack",
    }
}
