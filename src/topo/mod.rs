/// Topology domain layer: object model, remote fetching, error taxonomy.
pub mod errors;
pub mod fetch;
pub mod object;

pub use errors::TopoError;
pub use fetch::{GET_TIMEOUT, get_object, list_objects};
pub use object::{Entity, Id, Kind, Object, ObjectType, ObjectVariant, Relation};
