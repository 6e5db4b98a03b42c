//! core of the busline transit harvester: converts AMap (GCJ-02) bus line responses
//! into WGS-84 stop and line collections.
//!
//! the modules are layered leaf-first:
//! * [`geodesy`] - GCJ-02 -> WGS-84 coordinate correction
//! * [`route`] - polyline decoding
//! * [`stop`] - stop record construction
//! * [`line`] - line metadata and raw API response types
//! * [`pipeline`] - the per-line fetch loop with skip-on-failure semantics
//! * [`aggregate`] - merging per-line tables into CRS-tagged collections
pub mod aggregate;
pub mod geodesy;
pub mod line;
pub mod pipeline;
pub mod route;
pub mod stop;
