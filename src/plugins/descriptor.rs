/// Static metadata describing a plugin contributed to the build pipeline.
#[derive(Debug)]
pub struct PluginDescriptor {
    /// Stable identifier used to enable the plugin from configuration.
    pub id: &'static str,
    /// One-line summary shown by listing commands.
    pub summary: &'static str,
}
