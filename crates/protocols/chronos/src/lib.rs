//! Chronos Cron Scheduler
//!
//! Chronos is the Helios precompile that runs a contract method every N
//! blocks until an expiration block. Each job owns a funded wallet that pays
//! for its executions, so creating a job means picking a frequency, a
//! lifetime and a deposit large enough to cover every run.
//!
//! # Pipeline
//!
//! - [`gas`]: per-execution cost for a target method
//! - [`calculator`]: deposit from (frequency, duration) and back
//! - [`validate`]: bound checks with aggregated reasons
//! - [`tx_builder`]: positional arguments for createCron / updateCron / cancelCron
//!
//! All of it is pure: the current block height is always an input.

pub mod block_time;
pub mod calculator;
pub mod constants;
pub mod gas;
pub mod state;
pub mod tx_builder;
pub mod validate;

pub use block_time::{
    blocks_for_duration, duration_label_for_blocks, duration_options, frequency_options,
    seconds_for_blocks, BlockClock, BlockOption,
};
pub use calculator::{
    deposit_preview, expiration_from_deposit, max_deposit_for_horizon, remaining_executions,
    required_deposit, summarize_job, DepositEstimate, ExpirationEstimate,
};
pub use gas::{classify_method, estimate_cost_per_execution, GasParams, MethodCategory};
pub use state::{ChronosError, CronDepositPreview, CronJobInfo, CronJobSummary};
pub use tx_builder::{
    encode_method_args, prepare_cancel_job, prepare_create_job, prepare_update_job, CallPayload,
    CancelJobArgs, CreateJobArgs, CreateJobRequest, CronCallArgs, ParameterSource,
    PreparedCreateJob, UpdateJobArgs, UpdateJobRequest,
};
pub use validate::{validate_create, validate_update, Check, CronParams, ValidationReport};
