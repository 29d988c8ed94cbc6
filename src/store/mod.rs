// Persistence layer
// The store translates logical bookmark operations into SQL against the database.

pub mod bookmark_store;
