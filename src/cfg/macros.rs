//! 组件构造相关的宏定义
//!
//! 让组件可以直接由其配置类型转换得到

/// 为配置类型实现 `From<Config> for Component`
///
/// - `impl_from!(Config => Component)`：调用 `Component::new(config)`
/// - `impl_from!(Config => Component, field: config)`：直接 `Self { config }`
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };

    ($config_type:ty => $target_type:ty, field: $field:ident) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                Self { $field: config }
            }
        }
    };
}

/// 为组件实现 `Box<T>` 到 `Box<dyn Trait>` 的转换
///
/// 用法：`impl_box_from!(ConsoleSink => dyn LogSink)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}
