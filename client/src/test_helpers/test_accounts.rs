macro_rules! acc_keypair_fn {
    ($fn_name:ident, $b58:literal) => {
        #[inline]
        pub fn $fn_name() -> &'static ::solana_sdk::signature::Keypair {
            static KP: ::std::sync::LazyLock<::solana_sdk::signature::Keypair> =
                ::std::sync::LazyLock::new(|| {
                    ::solana_sdk::signature::Keypair::from_base58_string($b58)
                });

            ::std::sync::LazyLock::force(&KP)
        }
    };
}

#[rustfmt::skip]
mod unformatted {
    acc_keypair_fn!(board_account, "4UahpeecuKmCQJv3XbkzmBxSd5JxdviM6UGMCZ5FsMw5XZv7APjzDb1WM9WcCdKX7rmsYWSi7Cumcf59TvXyLR45");
    acc_keypair_fn!(wallet_owner, "4phi3FwSKx8CQssCGPgBZxabjeLBZK7ZhhPrVVo1vsP4T3F9iUdQPFf7wphop5dhYg9CJV35GoPMSTdb95w3FfoE");
    acc_keypair_fn!(other_wallet, "5LqH8f3NYsSHGvEYbaWnRM8swJgEB9SdSrT6KkCeerTMbyZnQgSZhPQwJEVSsfZVMRPz4q4P4UYynEwvw2KApYrP");
}

pub use unformatted::*;
