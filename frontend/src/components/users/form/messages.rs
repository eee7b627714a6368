#[derive(Clone)]
pub enum Msg {
    /// Input `name` attribute and its new value.
    Edit { name: String, value: String },
    Submit,
    Cancel,
}
