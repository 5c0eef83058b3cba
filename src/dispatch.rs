mod dispatcher;
mod error;
mod invoker;
mod process;


pub use dispatcher::Dispatcher;
pub use error::{DispatchError, Result};
pub use invoker::PipelineInvoker;
pub use process::RadiancePipeline;
