use std::future::Future;

use anyhow::{anyhow, Result};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

fn current_thread_runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Runs a future to completion from a synchronous tool handler.
///
/// Inside a multi-thread runtime this parks the current worker with
/// `block_in_place`. A current-thread runtime cannot be parked, so the future
/// runs on a scoped thread with its own runtime. Outside any runtime it spins
/// up a current-thread one.
pub fn block_on<F>(future: F) -> Result<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            Ok(tokio::task::block_in_place(|| handle.block_on(future)))
        }
        Ok(_) => std::thread::scope(|scope| {
            scope
                .spawn(move || -> Result<F::Output> {
                    Ok(current_thread_runtime()?.block_on(future))
                })
                .join()
                .map_err(|_| anyhow!("tool task panicked"))?
        }),
        Err(_) => Ok(current_thread_runtime()?.block_on(future)),
    }
}
