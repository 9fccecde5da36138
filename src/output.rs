use crate::interpreter::Value;

/// Receives the values produced by `print` statements. The interpreter never
/// writes to a stream itself; rendering is up to the sink.
pub trait OutputSink {
    fn write(&mut self, value: Value);
}

/// Collects printed values in order.
impl OutputSink for Vec<Value> {
    fn write(&mut self, value: Value) {
        self.push(value);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, value: Value) {
        (**self).write(value);
    }
}
