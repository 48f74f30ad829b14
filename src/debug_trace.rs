use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @transition $state:expr, $ch:expr => $transition:expr ) => {
                println!("@transition: {:?} {:?} -> {:?}", $state, $ch, $transition);
            };

            ( @$kind:ident $($args:tt)+ ) => {
                println!("@{}: {}", stringify!($kind), format_args!($($args)+));
            };
        }
    } else {
        // NOTE: arguments are dropped without being evaluated, so
        // nothing that is only computed for tracing purposes should
        // be passed here.
        macro_rules! trace {
            ( $($args:tt)* ) => {};
        }
    }
}
