// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::task::yield_now;

/// Yield to the runtime enough times for woken timer tasks to run to completion.
pub async fn settle() {
    for _ in 0..16 {
        yield_now().await;
    }
}
