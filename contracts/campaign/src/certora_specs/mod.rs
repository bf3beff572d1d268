// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the campaign ledger.
//
// STRUCTURE:
//
// - model.rs          : Skolem variables, state snapshots
// - request_specs.rs  : Request creation and approval rules
// - accounting_specs.rs : Quorum arithmetic and balance rules
//
// USAGE:
// - Unit tests: cargo test -p campaign
// - Certora build: cargo build --features certora -p campaign
// - Verification: certoraSorobanProver campaign.conf
//
// ============================================================================

pub mod accounting_specs;
pub mod model;
pub mod request_specs;
