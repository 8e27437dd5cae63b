use fairval_core::Capability;

use crate::Fairval;
use crate::fairval_router_method;

impl Fairval {
    fairval_router_method! {
        /// Fetch a point-in-time quote for a single instrument.
        ///
        /// Connectors are tried in registration order under the per-provider
        /// timeout; `NotFound` from every attempt maps to a single `NotFound`.
        method: quote(inst: &fairval_core::Instrument) -> fairval_core::Quote,
        accessor: as_quote_provider,
        capability: Capability::Quote,
        call: quote(inst)
    }
}
