//! Records the geometry of each obstruction query, for an external visualiser.
//! Compiled down to nothing unless the `debug` feature is enabled.

use crate::math::{Point2d, Polygon};
#[cfg(feature = "debug")]
use std::cell::RefCell;

#[cfg(feature = "debug")]
thread_local! {
    static QUERIES: RefCell<Vec<serde_json::Value>> = RefCell::new(Vec::new());
}

/// Records the obstacle shape and radio path of a single query on this thread.
#[allow(unused_variables)]
pub(crate) fn debug_query(shape: &Polygon, sender: Point2d, receiver: Point2d) {
    #[cfg(feature = "debug")]
    {
        let shape = shape
            .vertices()
            .iter()
            .map(|v| serde_json::json!([v.x, v.y]))
            .collect::<Vec<_>>();
        let entry = serde_json::json!({
            "shape": shape,
            "sender": [sender.x, sender.y],
            "receiver": [receiver.x, receiver.y],
        });
        QUERIES.with(|queries| queries.borrow_mut().push(entry));
    }
}

/// Drains the queries recorded on this thread since the last call, as a JSON array
/// with one `{ shape, sender, receiver }` object per query.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    serde_json::Value::Array(QUERIES.with(|queries| queries.take()))
}
