//! Order types and the raw submission format.
//!
//! `RawOrder` is what the transport layer delivers: a per-unit tuple of
//! province names and an action keyword, straight out of the submitted JSON.
//! `Order` is the validated, id-resolved form the adjudicator consumes.
//! Conversion between the two is the validator's job.

use serde_json::Value;

use crate::error::OrderError;
use crate::map::ProvinceId;

/// A validated order. `unit` is the province of the unit the order binds to;
/// a unit has at most one order per turn and defaults to Hold without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Hold in place.
    Hold { unit: ProvinceId },

    /// Move to an adjacent province, or to a coastal province reachable by
    /// convoy for an army.
    Move { unit: ProvinceId, target: ProvinceId },

    /// Add one to the defense strength of the unit holding at `supported`.
    SupportHold { unit: ProvinceId, supported: ProvinceId },

    /// Add one to the attack strength of the move `supported` → `target`.
    SupportMove {
        unit: ProvinceId,
        supported: ProvinceId,
        target: ProvinceId,
    },

    /// Carry the army moving `from` → `to` through this fleet's sea province.
    Convoy {
        unit: ProvinceId,
        from: ProvinceId,
        to: ProvinceId,
    },
}

impl Order {
    /// The province of the unit this order binds to.
    pub fn unit(&self) -> ProvinceId {
        match *self {
            Order::Hold { unit }
            | Order::Move { unit, .. }
            | Order::SupportHold { unit, .. }
            | Order::SupportMove { unit, .. }
            | Order::Convoy { unit, .. } => unit,
        }
    }
}

/// The action part of a raw submission tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAction {
    Hold,
    Move { target: String },
    /// `target` is None for supporting a hold.
    Support {
        supported: String,
        target: Option<String>,
    },
    Convoy { from: String, to: String },
}

/// One submitted order, as delivered by the transport: the ordering unit's
/// location plus an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOrder {
    pub location: String,
    pub action: RawAction,
}

impl RawOrder {
    pub fn hold(location: &str) -> RawOrder {
        RawOrder {
            location: location.to_string(),
            action: RawAction::Hold,
        }
    }

    pub fn mv(location: &str, target: &str) -> RawOrder {
        RawOrder {
            location: location.to_string(),
            action: RawAction::Move {
                target: target.to_string(),
            },
        }
    }

    pub fn support_hold(location: &str, supported: &str) -> RawOrder {
        RawOrder {
            location: location.to_string(),
            action: RawAction::Support {
                supported: supported.to_string(),
                target: None,
            },
        }
    }

    pub fn support_move(location: &str, supported: &str, target: &str) -> RawOrder {
        RawOrder {
            location: location.to_string(),
            action: RawAction::Support {
                supported: supported.to_string(),
                target: Some(target.to_string()),
            },
        }
    }

    pub fn convoy(location: &str, from: &str, to: &str) -> RawOrder {
        RawOrder {
            location: location.to_string(),
            action: RawAction::Convoy {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }

    /// Parses one submission tuple from its JSON array form:
    ///
    /// * `["Paris", "hold"]`
    /// * `["Paris", "move", "Burgundy"]`
    /// * `["Munich", "support", "Ruhr"]` (support hold)
    /// * `["Munich", "support", "Ruhr", "Burgundy"]` (support move)
    /// * `["North Sea", "convoy", "London", "Norway"]`
    pub fn from_json(value: &Value) -> Result<RawOrder, OrderError> {
        let items = value
            .as_array()
            .ok_or_else(|| OrderError::Malformed("order is not an array".to_string()))?;

        let field = |i: usize| -> Result<&str, OrderError> {
            items
                .get(i)
                .and_then(Value::as_str)
                .ok_or_else(|| OrderError::Malformed(format!("missing field {i}")))
        };

        let location = field(0)?.to_string();
        let kind = field(1)?;
        let action = match kind {
            "hold" => RawAction::Hold,
            "move" => RawAction::Move {
                target: field(2)?.to_string(),
            },
            "support" => RawAction::Support {
                supported: field(2)?.to_string(),
                target: match items.get(3) {
                    Some(v) if !v.is_null() => Some(
                        v.as_str()
                            .ok_or_else(|| {
                                OrderError::Malformed("support target is not a string".to_string())
                            })?
                            .to_string(),
                    ),
                    _ => None,
                },
            },
            "convoy" => RawAction::Convoy {
                from: field(2)?.to_string(),
                to: field(3)?.to_string(),
            },
            other => return Err(OrderError::UnknownKind(other.to_string())),
        };

        Ok(RawOrder { location, action })
    }

    /// Parses a power's whole order list. Each element parses independently
    /// so one malformed tuple does not take down the rest of the list.
    pub fn list_from_json(value: &Value) -> Vec<Result<RawOrder, OrderError>> {
        match value.as_array() {
            Some(items) => items.iter().map(RawOrder::from_json).collect(),
            None => vec![Err(OrderError::Malformed(
                "order list is not an array".to_string(),
            ))],
        }
    }
}
