//! dai-core: utility layer for iterative inference algorithms
//!
//! The central piece is [`ConvergenceMonitor`], which keeps the last few
//! differences produced by an iterative algorithm and reports their maximum.
//! Around it sit the small helpers the algorithms share: the [`Real`] alias,
//! a [`HashMap`] alias, container printing, a string tokenizer, wall-clock
//! timing and the random number helpers of `dai-rng`.

pub mod collections;
pub mod config;
pub mod diffs;
pub mod display;
pub mod error;
mod macros;
pub mod real;
pub mod timer;
pub mod tokenize;

#[doc(hidden)]
pub use ::log as __log;

pub use collections::{concat, HashMap};
pub use config::MonitorConfig;
pub use diffs::{ConvergenceMonitor, MonitorState};
pub use display::ContainerDisplay;
pub use error::{DaiError, DaiResult};
pub use real::{exp, log, Real};
pub use timer::toc;
pub use tokenize::{tokenize_into, tokenize_string, DEFAULT_DELIMITERS};

pub use dai_rng::{rnd, rnd_int, rnd_seed, rnd_stdnormal, rnd_uniform, DaiRng};
