pub struct Icons;

impl Icons {
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
}
