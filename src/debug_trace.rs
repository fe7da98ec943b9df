macro_rules! trace {
    ( @event $event:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@event: {:?}", $event);
    };

    ( @stack $($args:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@stack: {}", format_args!($($args)+));
    };

    ( @match $($args:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@match: {}", format_args!($($args)+));
    };

    ( @selector $($args:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@selector: {}", format_args!($($args)+));
    };
}
