//! VoxNote - voice note recording and catalog management core
//!
//! This crate provides the lifecycle manager for voice memos: the capture
//! session state machine, durable note identity, and catalogs that keep
//! the in-memory collection consistent with the backing store.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core entities, value objects, the capture state machine,
//!   and domain errors
//! - **Application**: Use cases (recording session, note catalogs, playback
//!   control) and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (JSON metadata store,
//!   local file store, XDG config, no-op capture/playback)
//!
//! Two catalog variants coexist behind one trait: a metadata-backed
//! catalog with generated identifiers, and a directory-backed catalog
//! where the filename is the identity and the listing is the source of
//! truth. The deployment chooses the variant; their semantics are never
//! merged.

pub mod application;
pub mod domain;
pub mod infrastructure;
