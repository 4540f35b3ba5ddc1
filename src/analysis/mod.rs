pub mod attack;
pub mod correlation;
pub mod factors;
pub mod kasiski;
pub mod key_length;

pub use self::attack::{AttackReport, Cryptanalyst, KeyPreview, LengthTrial};
pub use self::correlation::{KeyCandidates, KeySpace, PositionCorrelation};
pub use self::factors::FactorCounts;
pub use self::kasiski::find_repeat_distances;
pub use self::key_length::select_key_lengths;
