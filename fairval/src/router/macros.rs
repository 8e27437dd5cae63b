/// Generate a router async method that selects providers, applies kind filters,
/// and calls a single-provider method. Handles not-found fallbacks via orchestrator.
///
/// The `capability` argument is a `fairval_core::Capability`; its
/// `not_found_label()` becomes the noun in the final "{label} for {SYMBOL}" error.
#[macro_export]
macro_rules! fairval_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $inst_ident:ident : $inst_ty:ty $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident( $call_first:ident $(, $call_rest:ident )* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "fairval::router",
                skip(self $(, $arg_ident)*),
                fields(symbol = %$inst_ident.symbol()),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no eligible provider succeeds or none support the capability.
        pub async fn $name(
            &self,
            $inst_ident: $inst_ty,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, fairval_core::FairvalError> {
            self.fetch_single(
                $inst_ident,
                $capability,
                move |c, i| {
                    if !c.supports_kind(*i.kind()) {
                        return None;
                    }
                    c.$accessor()?;
                    $( let $arg_ident = $arg_ident.clone(); )*
                    Some(async move {
                        match c.$accessor() {
                            Some(p) => p.$call_name(&i $(, $call_rest )*).await,
                            None => Err(fairval_core::FairvalError::connector(
                                c.name(),
                                format!("missing {} capability during call", $capability),
                            )),
                        }
                    })
                },
            )
            .await
        }
    };
}
