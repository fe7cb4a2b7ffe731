// std imports
pub use std::fmt::Display;
pub use std::time::Duration;
pub use std::path::{ Path, PathBuf };
pub use std::ops::{ Deref, DerefMut };

// sync imports
pub use std::sync::Arc;
pub use std::sync::atomic::{ AtomicUsize, Ordering::SeqCst };

// async trait
pub use async_trait::async_trait;

// tokio imports
pub use tokio::task::JoinHandle;
pub use tokio::sync::mpsc::{ UnboundedSender as AsyncUnboundedSender, UnboundedReceiver as AsyncUnboundedReceiver, unbounded_channel as async_unbounded_channel };

pub use parking_lot::{ Mutex, RwLock };

// serde imports
pub use serde::{ Serialize, Deserialize };

// folder imports
pub use crate::SETTINGS_FILE;

// general imports
pub use crate::engine::*;
pub use crate::energy_monitor::*;
