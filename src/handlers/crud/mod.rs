//! One set of list/create/retrieve/update/destroy handlers, instantiated per
//! entity through [`Resource`].

mod create;
mod destroy;
mod list;
mod retrieve;
mod update;

pub use create::create;
pub use destroy::destroy;
pub use list::list;
pub use retrieve::retrieve;
pub use update::{partial_update, update};

use async_trait::async_trait;
use serde::Serialize;

use crate::api::WriteBody;
use crate::database::{DatabaseError, Store};
use crate::middleware::ResourceKind;

type Create<R> = <<R as Resource>::Body as WriteBody>::Create;
type Update<R> = <<R as Resource>::Body as WriteBody>::Update;

/// Store operations for one entity type
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    const KIND: ResourceKind;

    type Record: Serialize + Send;
    type Body: WriteBody<Record = Self::Record>;

    fn id(record: &Self::Record) -> i64;

    async fn list(store: &Store) -> Result<Vec<Self::Record>, DatabaseError>;

    async fn get(store: &Store, id: i64) -> Result<Self::Record, DatabaseError>;

    async fn create(store: &Store, data: Create<Self>) -> Result<Self::Record, DatabaseError>;

    async fn update(store: &Store, id: i64, data: Update<Self>) -> Result<Self::Record, DatabaseError>;

    async fn delete(store: &Store, id: i64) -> Result<(), DatabaseError>;
}
