//! Light theme family

use super::{Button, Checkbox, FamilyFactory};
use crate::kit::family_key::{FamilyKey, LIGHT};

pub struct LightUi;

impl FamilyFactory for LightUi {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(LIGHT)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox)
    }
}

pub struct LightButton;

impl Button for LightButton {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(LIGHT)
    }

    fn render(&self) -> String {
        "Rendering a light button.".to_string()
    }
}

pub struct LightCheckbox;

impl Checkbox for LightCheckbox {
    fn family(&self) -> FamilyKey {
        FamilyKey::from(LIGHT)
    }

    fn render(&self) -> String {
        "Rendering a light checkbox.".to_string()
    }
}
