/// Policy for deciding which fields reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePolicy {
    /// Presence-aware behavior (default):
    ///
    /// Only fields whose `should_serialize` predicate holds are written, so a
    /// decoder can tell "not provided" from "provided with the default".
    #[default]
    PresenceAware,
    /// Write the effective value of every field.
    ///
    /// For peers that expect all fields on the wire. Presence is lost: after
    /// a round trip every field reads as specified.
    AlwaysEmit,
}
