//! Gateway capability model
//!
//! The ten operations a gateway may advertise support for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported gateway capabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    Authorize,
    CompleteAuthorize,
    Capture,
    Purchase,
    CompletePurchase,
    Refund,
    Void,
    CreateCard,
    DeleteCard,
    UpdateCard,
}

impl Capability {
    /// Get capability number (1-10)
    pub fn number(&self) -> u8 {
        match self {
            Capability::Authorize => 1,
            Capability::CompleteAuthorize => 2,
            Capability::Capture => 3,
            Capability::Purchase => 4,
            Capability::CompletePurchase => 5,
            Capability::Refund => 6,
            Capability::Void => 7,
            Capability::CreateCard => 8,
            Capability::DeleteCard => 9,
            Capability::UpdateCard => 10,
        }
    }

    /// Get the factory method name for this capability
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Authorize => "authorize",
            Capability::CompleteAuthorize => "completeAuthorize",
            Capability::Capture => "capture",
            Capability::Purchase => "purchase",
            Capability::CompletePurchase => "completePurchase",
            Capability::Refund => "refund",
            Capability::Void => "void",
            Capability::CreateCard => "createCard",
            Capability::DeleteCard => "deleteCard",
            Capability::UpdateCard => "updateCard",
        }
    }

    /// Get the capability flag name (`supportsAuthorize` etc.)
    pub fn flag_name(&self) -> &'static str {
        match self {
            Capability::Authorize => "supportsAuthorize",
            Capability::CompleteAuthorize => "supportsCompleteAuthorize",
            Capability::Capture => "supportsCapture",
            Capability::Purchase => "supportsPurchase",
            Capability::CompletePurchase => "supportsCompletePurchase",
            Capability::Refund => "supportsRefund",
            Capability::Void => "supportsVoid",
            Capability::CreateCard => "supportsCreateCard",
            Capability::DeleteCard => "supportsDeleteCard",
            Capability::UpdateCard => "supportsUpdateCard",
        }
    }

    /// Get all capabilities in contract order
    pub fn all() -> Vec<Capability> {
        vec![
            Capability::Authorize,
            Capability::CompleteAuthorize,
            Capability::Capture,
            Capability::Purchase,
            Capability::CompletePurchase,
            Capability::Refund,
            Capability::Void,
            Capability::CreateCard,
            Capability::DeleteCard,
            Capability::UpdateCard,
        ]
    }

    /// Parse from capability number
    pub fn from_number(n: u8) -> Option<Capability> {
        match n {
            1 => Some(Capability::Authorize),
            2 => Some(Capability::CompleteAuthorize),
            3 => Some(Capability::Capture),
            4 => Some(Capability::Purchase),
            5 => Some(Capability::CompletePurchase),
            6 => Some(Capability::Refund),
            7 => Some(Capability::Void),
            8 => Some(Capability::CreateCard),
            9 => Some(Capability::DeleteCard),
            10 => Some(Capability::UpdateCard),
            _ => None,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Capability> {
        match s.to_lowercase().as_str() {
            "authorize" => Some(Capability::Authorize),
            "completeauthorize" | "complete_authorize" => Some(Capability::CompleteAuthorize),
            "capture" => Some(Capability::Capture),
            "purchase" => Some(Capability::Purchase),
            "completepurchase" | "complete_purchase" => Some(Capability::CompletePurchase),
            "refund" => Some(Capability::Refund),
            "void" => Some(Capability::Void),
            "createcard" | "create_card" => Some(Capability::CreateCard),
            "deletecard" | "delete_card" => Some(Capability::DeleteCard),
            "updatecard" | "update_card" => Some(Capability::UpdateCard),
            _ => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
