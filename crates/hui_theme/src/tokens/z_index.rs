//! Z-index layer tokens

use serde::{Deserialize, Serialize};

/// Stacking layers, lowest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZIndexToken {
    AppBar,
    Drawer,
    Modal,
    Notification,
    Tooltip,
}

/// Complete set of z-index layers
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZIndexTokens {
    pub app_bar: i32,
    pub drawer: i32,
    pub modal: i32,
    pub notification: i32,
    pub tooltip: i32,
}

impl ZIndexTokens {
    pub fn get(&self, token: ZIndexToken) -> i32 {
        match token {
            ZIndexToken::AppBar => self.app_bar,
            ZIndexToken::Drawer => self.drawer,
            ZIndexToken::Modal => self.modal,
            ZIndexToken::Notification => self.notification,
            ZIndexToken::Tooltip => self.tooltip,
        }
    }
}

impl Default for ZIndexTokens {
    fn default() -> Self {
        Self {
            app_bar: 1100,
            drawer: 1200,
            modal: 1300,
            notification: 1400,
            tooltip: 1500,
        }
    }
}
