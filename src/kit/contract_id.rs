use super::Operation;

crate::define_id_enum! {
    /// Capability a component implements. Each contract declares a fixed operation set.
    ContractId {
        Button => "Button" | "button",
        Checkbox => "Checkbox" | "checkbox",
        AreaCalculator => "AreaCalculator" | "area-calculator" | "area_calculator",
        Drawable => "Drawable" | "drawable",
        PaymentService => "PaymentService" | "payment-service" | "payment_service",
        Character => "Character" | "character",
    }
}

impl ContractId {
    /// Operations every variant of this contract must support
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            ContractId::Button | ContractId::Checkbox => &[Operation::Render],
            ContractId::AreaCalculator => &[Operation::CalculateArea],
            ContractId::Drawable => &[Operation::Draw],
            ContractId::PaymentService => &[Operation::ProcessPayment],
            ContractId::Character => &[Operation::Attack],
        }
    }

    pub fn declares(&self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }
}
