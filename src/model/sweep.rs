use serenity::all::UserId;

/// Outcome of one inactivity sweep.
///
/// Collected while iterating members so the scheduler can log a single summary line
/// and tests can assert on exactly who was transitioned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SweepReport {
    /// Non-bot members evaluated.
    pub scanned: usize,
    /// Members skipped because they already hold the marker role.
    pub already_marked: usize,
    /// Inactive members skipped because they posted the exemption token.
    pub exempt: Vec<UserId>,
    /// Members that received the marker role during this sweep.
    pub marked: Vec<UserId>,
    /// Marked members whose notification could not be delivered.
    pub unnotified: Vec<UserId>,
    /// Members the marker role could not be added to.
    pub failed: Vec<UserId>,
}

/// Outcome of processing one activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    /// The channel is not under an allow-listed category.
    Ignored,
    /// Activity was recorded; the member did not hold the marker role.
    Recorded,
    /// Activity was recorded and the marker role was removed.
    Restored,
}
