// Infrastructure layer (adapters for external services)
// MongoDB-backed repository implementations live here.

pub mod repositories;
