macro_rules! test_bbg_at_depth {
    ($($depth:literal),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<eq_encrypt_decrypt_depth_ $depth>]() {
                    exact_identities($depth);
                }

                #[test]
                fn [<eq_serialize_deserialize_depth_ $depth>]() {
                    serialize_artifacts($depth);
                }
            }
        )*
    };
}
