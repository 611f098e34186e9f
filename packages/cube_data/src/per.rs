
macro_rules! per_enum {
    (
        $name:ident,
        $num_constant:ident = $num:expr,
        $per_name:ident,
        $all_constant:ident,
        ($(
            $variant:ident,
        )*),
    )=>{
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u8)]
        pub enum $name {$(
            $variant,
        )*}

        pub const $num_constant: usize = $num;

        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $per_name<T>(pub [T; $num_constant]);

        pub const $all_constant: $per_name<$name> = $per_name([$(
            $name::$variant,
        )*]);

        impl<T> Index<$name> for $per_name<T> {
            type Output = T;

            fn index(&self, i: $name) -> &Self::Output {
                &self.0[i as usize]
            }
        }

        impl<T> IndexMut<$name> for $per_name<T> {
            fn index_mut(&mut self, i: $name) -> &mut Self::Output {
                &mut self.0[i as usize]
            }
        }

        impl<T: Clone> $per_name<T> {
            pub fn repeat(val: T) -> Self {
                $per_name([$(
                    #[allow(non_snake_case)]
                    {
                        let $variant = ();
                        let _ = $variant;
                        val.clone()
                    },
                )*])
            }

            pub fn map<B, F>(self, f: F) -> $per_name<B>
            where
                F: FnMut(T) -> B,
            {
                $per_name(self.0.map(f))
            }
        }

        impl<T> IntoIterator for $per_name<T> {
            type Item = T;
            type IntoIter = <[T; $num_constant] as IntoIterator>::IntoIter;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}
