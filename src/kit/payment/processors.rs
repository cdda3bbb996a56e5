use super::PaymentService;

pub struct ProcessorA;

impl PaymentService for ProcessorA {
    fn processor(&self) -> &str {
        "Processor A"
    }

    fn process_payment(&self, amount: f64) -> String {
        format!("Processing payment using Processor A: ${}", amount)
    }
}

pub struct ProcessorB;

impl PaymentService for ProcessorB {
    fn processor(&self) -> &str {
        "Processor B"
    }

    fn process_payment(&self, amount: f64) -> String {
        format!("Processing payment using Processor B: ${}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_print_without_fraction() {
        assert_eq!(
            ProcessorA.process_payment(150.0),
            "Processing payment using Processor A: $150"
        );
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(
            ProcessorB.process_payment(19.99),
            "Processing payment using Processor B: $19.99"
        );
    }
}
