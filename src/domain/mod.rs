// Domain layer: the guest list model and the ports the binaries are wired
// through. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
