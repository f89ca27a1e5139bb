//! Assistant page layer: snapshot decoding, markup schema validation,
//! farm-table extraction, and the bounds store.
mod decode;
mod extract;
mod persist;
mod schema;
mod store;
mod types;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{extract_page, resolve_href};
pub use persist::{ensure_dir, write_atomic, PersistError};
pub use schema::{PageSchema, SchemaError};
pub use store::{
    load_saved_bounds, persist_bounds, BoundsStore, InMemoryBoundsStore, SavedBounds,
    MAX_BOUND_KEY, MIN_BOUND_KEY,
};
pub use types::{ActionLink, ExtractedPage, FarmTable, ResourceMarker, ResourceReading, TargetRow};
