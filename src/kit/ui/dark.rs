//! Dark theme family

use super::{Button, Checkbox, FamilyFactory};
use crate::kit::family_key::{FamilyKey, DARK};

pub struct DarkUi;

impl FamilyFactory for DarkUi {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(DARK)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox)
    }
}

pub struct DarkButton;

impl Button for DarkButton {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(DARK)
    }

    fn render(&self) -> String {
        "Rendering a dark button.".to_string()
    }
}

pub struct DarkCheckbox;

impl Checkbox for DarkCheckbox {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(DARK)
    }

    fn render(&self) -> String {
        "Rendering a dark checkbox.".to_string()
    }
}
