// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Operator Commands
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Typed operator command vocabulary.
//!
//! Inbound commands arrive from the control panel as a property name and
//! a value. Unknown names and type-mismatched payloads parse to `None`
//! and are dropped by the caller, never miscomputed.

/// Payload of an inbound property write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandValue {
    None,
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Operator commands the core handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreCommand {
    /// Toggle selection of the rod with this identifier (100*row + col).
    RodSelect(i64),
    /// Emergency protection: full insertion of every rod.
    Az5,
    /// Drive selected rods toward withdrawal; payload is press/release.
    RodManualUp(bool),
    /// Drive selected rods toward insertion; payload is press/release.
    RodManualDown(bool),
    IncreaseRodSpeed,
    DecreaseRodSpeed,
    RodStop,
    RodSelectAllManual,
    RodSelectAllAutomatic,
    RodSelectNone,
}

impl CoreCommand {
    /// Parse a property write into a command. Returns `None` for unknown
    /// property names and for payloads of the wrong type.
    pub fn parse(property: &str, value: CommandValue) -> Option<CoreCommand> {
        match property {
            "Reactor#RodSelect" => match value {
                CommandValue::Integer(id) => Some(CoreCommand::RodSelect(id)),
                _ => None,
            },
            "Reactor#AZ5" => Some(CoreCommand::Az5),
            "Reactor#RodManualUp" => match value {
                CommandValue::Bool(pressed) => Some(CoreCommand::RodManualUp(pressed)),
                _ => None,
            },
            "Reactor#RodManualDown" => match value {
                CommandValue::Bool(pressed) => Some(CoreCommand::RodManualDown(pressed)),
                _ => None,
            },
            "Reactor#IncreaseRodSpeed" => Some(CoreCommand::IncreaseRodSpeed),
            "Reactor#DecreaseRodSpeed" => Some(CoreCommand::DecreaseRodSpeed),
            "Reactor#RodStop" => Some(CoreCommand::RodStop),
            "Reactor#RodSelectAllManual" => Some(CoreCommand::RodSelectAllManual),
            "Reactor#RodSelectAllAutomatic" => Some(CoreCommand::RodSelectAllAutomatic),
            "Reactor#RodSelectNone" => Some(CoreCommand::RodSelectNone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rod_select() {
        assert_eq!(
            CoreCommand::parse("Reactor#RodSelect", CommandValue::Integer(2831)),
            Some(CoreCommand::RodSelect(2831))
        );
    }

    #[test]
    fn test_parse_az5_ignores_payload_type() {
        assert_eq!(
            CoreCommand::parse("Reactor#AZ5", CommandValue::None),
            Some(CoreCommand::Az5)
        );
        assert_eq!(
            CoreCommand::parse("Reactor#AZ5", CommandValue::Bool(true)),
            Some(CoreCommand::Az5)
        );
    }

    #[test]
    fn test_parse_manual_up_needs_bool() {
        assert_eq!(
            CoreCommand::parse("Reactor#RodManualUp", CommandValue::Bool(true)),
            Some(CoreCommand::RodManualUp(true))
        );
        assert_eq!(
            CoreCommand::parse("Reactor#RodManualUp", CommandValue::Integer(1)),
            None
        );
    }

    #[test]
    fn test_parse_unknown_property() {
        assert_eq!(
            CoreCommand::parse("Reactor#NoSuchProperty", CommandValue::None),
            None
        );
        assert_eq!(CoreCommand::parse("Turbine#Valve", CommandValue::Float(0.5)), None);
    }
}
