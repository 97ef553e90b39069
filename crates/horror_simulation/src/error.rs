//! Ошибки контроллера
//!
//! Gameplay-операции (tick, mouse look) не могут упасть. Ошибки бывают
//! только при сборке: невалидный конфиг или отсутствующий node в сцене.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("invalid character config: {0}")]
    InvalidConfig(&'static str),

    #[error("required node not found: {0}")]
    MissingNode(String),
}
