//! Output formatting for multiple formats
//!
//! Every command produces a serializable report. The formatter renders it as
//! JSON, YAML or human-readable text.
//!
//! # Example
//!
//! ```
//! use kitbox::cli::output::{AreaReport, OutputFormat, OutputFormatter};
//!
//! let report = AreaReport {
//!     shape: "Square".to_string(),
//!     dimensions: vec![3.0],
//!     area: 9.0,
//! };
//! let output = OutputFormatter::new(OutputFormat::Json).format(&report).unwrap();
//! assert!(output.contains("\"area\": 9.0"));
//! ```

use anyhow::{Context, Result};
use serde::Serialize;

use crate::kit::builder::{BuildState, BuildStep, Computer};
use crate::kit::payment::{CartItem, Receipt};
use crate::kit::user::User;
use crate::kit::{ContractId, RegistrationKind};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Text rendering of a report for terminals
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryEntry {
    pub key: String,
    pub kind: RegistrationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryReport {
    pub entries: Vec<RegistryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentOutput {
    pub contract: ContractId,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyReport {
    pub family: String,
    pub components: Vec<ComponentOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputerReport {
    pub builder: String,
    pub computer: Computer,
    #[serde(flatten)]
    pub state: BuildState,
    pub unpopulated: Vec<BuildStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackReport {
    pub class: String,
    pub name: String,
    pub attack: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub shape: String,
    pub dimensions: Vec<f64>,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawReport {
    pub renderer: String,
    pub shape: String,
    pub size: f64,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReport {
    pub items: Vec<CheckoutLine>,
    pub total: f64,
    pub receipt: Receipt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<&CartItem> for CheckoutLine {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: item.quantity(),
            price: item.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersReport {
    pub names: Vec<String>,
    pub users: Vec<User>,
    pub found: Option<User>,
}

/// Output formatter for command reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<T>(&self, report: &T) -> Result<String>
    where
        T: Serialize + HumanReadable,
    {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(report.to_human()),
        }
    }
}

fn header(title: &str) -> String {
    format!("{}\n{}\n\n", title, RULE)
}

fn tree_line(is_last: bool, label: &str, value: &str) -> String {
    let connector = if is_last { "\u{2514}" } else { "\u{251C}" };
    format!("{}\u{2500} {:<10}{}\n", connector, label, value)
}

impl HumanReadable for RegistryReport {
    fn to_human(&self) -> String {
        let mut output = header("Registered Keys");
        if self.entries.is_empty() {
            output.push_str("(none)\n");
        }
        for entry in &self.entries {
            output.push_str(&format!("{:<12}{}\n", entry.kind.name(), entry.key));
        }
        output
    }
}

impl HumanReadable for FamilyReport {
    fn to_human(&self) -> String {
        let mut output = header(&format!("\u{2713} Family: {}", self.family));
        for (i, component) in self.components.iter().enumerate() {
            let is_last = i == self.components.len() - 1;
            output.push_str(&tree_line(
                is_last,
                &format!("{}:", component.contract),
                &component.output,
            ));
        }
        output
    }
}

impl HumanReadable for ComputerReport {
    fn to_human(&self) -> String {
        let mut output = header(&format!("\u{2713} Computer built by {}", self.builder));
        let fields = [
            ("CPU:", &self.computer.cpu),
            ("RAM:", &self.computer.ram),
            ("Storage:", &self.computer.storage),
            ("GPU:", &self.computer.gpu),
        ];
        for (i, (label, value)) in fields.iter().enumerate() {
            let value = if value.is_empty() {
                "(not set)"
            } else {
                value.as_str()
            };
            output.push_str(&tree_line(i == fields.len() - 1, label, value));
        }

        if !self.unpopulated.is_empty() {
            let steps: Vec<&str> = self.unpopulated.iter().map(|s| s.name()).collect();
            output.push_str(&format!(
                "\n\u{26A0} Builder skipped: {}\n",
                steps.join(", ")
            ));
        }
        output
    }
}

impl HumanReadable for Receipt {
    fn to_human(&self) -> String {
        let mut output = header(&format!("\u{2713} Order via {}", self.processor));
        output.push_str(&format!("{}\n{}\n", self.payment, self.status));
        output
    }
}

impl HumanReadable for CheckoutReport {
    fn to_human(&self) -> String {
        let mut output = header(&format!("\u{2713} Cart via {}", self.receipt.processor));
        for (i, line) in self.items.iter().enumerate() {
            let label = if line.quantity == 1 {
                format!("{}:", line.name)
            } else {
                format!("{} x{}:", line.name, line.quantity)
            };
            output.push_str(&tree_line(i == self.items.len() - 1, &label, &format!("${}", line.price)));
        }
        output.push_str(&format!(
            "\nTotal price is: ${}\n{}\n{}\n",
            self.total, self.receipt.payment, self.receipt.status
        ));
        output
    }
}

impl HumanReadable for UsersReport {
    fn to_human(&self) -> String {
        let mut output = header("Users");
        if self.names.is_empty() {
            output.push_str("(none)\n");
        }
        for name in &self.names {
            output.push_str(&format!("{}\n", name));
        }
        if let Some(user) = &self.found {
            output.push_str(&format!("\nFound: {} <{}>\n", user.name, user.email));
        }
        output
    }
}

impl HumanReadable for AttackReport {
    fn to_human(&self) -> String {
        format!("{} ({})\n{}\n", self.name, self.class, self.attack)
    }
}

impl HumanReadable for AreaReport {
    fn to_human(&self) -> String {
        format!("{} area: {:.2}\n", self.shape, self.area)
    }
}

impl HumanReadable for DrawReport {
    fn to_human(&self) -> String {
        format!("{}\n", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_report() -> ComputerReport {
        ComputerReport {
            builder: "Budget".to_string(),
            computer: Computer {
                cpu: "Intel Core i3".to_string(),
                ram: "8GB DDR4".to_string(),
                ..Default::default()
            },
            state: BuildState::Complete,
            unpopulated: vec![BuildStep::Gpu, BuildStep::Storage],
        }
    }

    #[test]
    fn test_json_output() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&computer_report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["builder"], "Budget");
        assert_eq!(parsed["computer"]["cpu"], "Intel Core i3");
        assert_eq!(parsed["state"], "complete");
        assert_eq!(parsed["unpopulated"], serde_json::json!(["gpu", "storage"]));
    }

    #[test]
    fn test_yaml_output() {
        let report = FamilyReport {
            family: "Dark".to_string(),
            components: vec![ComponentOutput {
                contract: ContractId::Button,
                output: "Rendering a dark button.".to_string(),
            }],
        };
        let output = OutputFormatter::new(OutputFormat::Yaml).format(&report).unwrap();
        assert!(output.contains("family: Dark"));
        assert!(output.contains("Rendering a dark button."));
    }

    #[test]
    fn test_human_computer_marks_skipped_steps() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&computer_report())
            .unwrap();
        assert!(output.contains("Intel Core i3"));
        assert!(output.contains("(not set)"));
        assert!(output.contains("Builder skipped: gpu, storage"));
    }

    #[test]
    fn test_human_receipt() {
        let receipt = Receipt {
            processor: "Processor A".to_string(),
            amount: 150.0,
            payment: "Processing payment using Processor A: $150".to_string(),
            status: "Order has been checked out.".to_string(),
        };
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&receipt)
            .unwrap();
        assert!(output.contains("Order via Processor A"));
        assert!(output.ends_with("Order has been checked out.\n"));
    }

    #[test]
    fn test_human_registry_listing() {
        let report = RegistryReport {
            entries: vec![RegistryEntry {
                key: "Gaming".to_string(),
                kind: RegistrationKind::Builder,
            }],
        };
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&report)
            .unwrap();
        assert!(output.contains("builder"));
        assert!(output.contains("Gaming"));

        let empty = RegistryReport { entries: vec![] };
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&empty)
            .unwrap();
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_human_checkout_lists_lines_and_total() {
        let report = CheckoutReport {
            items: vec![
                CheckoutLine {
                    name: "iPhone".to_string(),
                    quantity: 1,
                    price: 999.0,
                },
                CheckoutLine {
                    name: "Cable".to_string(),
                    quantity: 3,
                    price: 45.0,
                },
            ],
            total: 1044.0,
            receipt: Receipt {
                processor: "Processor A".to_string(),
                amount: 1044.0,
                payment: "Processing payment using Processor A: $1044".to_string(),
                status: "Order has been checked out.".to_string(),
            },
        };
        let output = report.to_human();
        assert!(output.contains("iPhone:"));
        assert!(output.contains("Cable x3:"));
        assert!(output.contains("Total price is: $1044"));
        assert!(output.ends_with("Order has been checked out.\n"));
    }

    #[test]
    fn test_human_users() {
        let report = UsersReport {
            names: vec!["alice".to_string()],
            users: vec![User::new("alice", "alice@example.com")],
            found: Some(User::new("alice", "alice@example.com")),
        };
        let output = report.to_human();
        assert!(output.contains("alice\n"));
        assert!(output.contains("Found: alice <alice@example.com>"));
    }

    #[test]
    fn test_human_area_rounds() {
        let report = AreaReport {
            shape: "Circle".to_string(),
            dimensions: vec![5.0],
            area: 78.53981633974483,
        };
        assert_eq!(report.to_human(), "Circle area: 78.54\n");
    }
}
