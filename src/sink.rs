//! Console sink: a subscriber that prints state as JSON.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use serde::Serialize;
use tracing::warn;

use crate::mvi::{Reducer, Store, Subscription};

/// Writes JSON documents, one per line (or per block when pretty).
///
/// Clones share the same writer.
pub struct ConsoleSink<W> {
    out: Rc<RefCell<W>>,
    pretty: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(pretty: bool) -> Self {
        Self::new(io::stdout(), pretty)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
            pretty,
        }
    }

    /// Write `value` as JSON followed by a newline.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Run `f` against the underlying writer.
    pub fn with_output<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&*self.out.borrow())
    }
}

impl<W: Write + 'static> ConsoleSink<W> {
    /// Subscribe to `store`, printing its state after every dispatch.
    pub fn attach<R>(&self, store: &Store<R>) -> Subscription<R>
    where
        R: Reducer,
        R::State: Serialize,
    {
        let sink = self.clone();
        store.subscribe(move |store| {
            if let Err(e) = sink.emit(&*store.get_state()) {
                warn!(error = %e, "console sink failed to write state");
            }
        })
    }
}

impl<W> Clone for ConsoleSink<W> {
    fn clone(&self) -> Self {
        Self {
            out: Rc::clone(&self.out),
            pretty: self.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{increment, CounterReducer};

    fn lines(sink: &ConsoleSink<Vec<u8>>) -> Vec<String> {
        sink.with_output(|buf| {
            String::from_utf8_lossy(buf)
                .lines()
                .map(str::to_string)
                .collect()
        })
    }

    #[test]
    fn compact_emit_writes_one_line() {
        let sink = ConsoleSink::new(Vec::new(), false);
        sink.emit(&serde_json::json!({"count": 1})).unwrap();
        assert_eq!(lines(&sink), vec![r#"{"count":1}"#]);
    }

    #[test]
    fn attached_sink_prints_after_each_dispatch() {
        let sink = ConsoleSink::new(Vec::new(), false);
        let store: Store<CounterReducer> = Store::default();
        let _sub = sink.attach(&store);

        store.dispatch(increment()).unwrap();
        store.dispatch(increment()).unwrap();

        assert_eq!(lines(&sink), vec![r#"{"count":1}"#, r#"{"count":2}"#]);
    }
}
