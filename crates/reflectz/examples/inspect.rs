/*
Example: flatten a struct into field descriptors, then write through a
descriptor path.

Run with:
```
RUST_LOG=reflectz=trace cargo run -p reflectz --example inspect
```
*/

use anyhow::Result;
use reflectz::{Config, Reflect, inspect, inspect_with, set_field};
use tracing_subscriber::EnvFilter;

#[derive(Reflect, Debug)]
pub struct MyStruct {
    #[tags(json = "id")]
    pub id: i64,
    #[tags(json = "email,omitempty")]
    pub email: String,
    #[tags(json = "info")]
    pub info: Another,
}

#[derive(Reflect, Debug, Default)]
pub struct Another {
    #[reflectz(skip)]
    pub address: String,
    pub extra: i64,
    #[tags(json = "list")]
    pub details: Vec<String>,
}

#[derive(Reflect, Debug)]
pub struct Example {
    pub data: Embedded,
}

#[derive(Reflect, Debug)]
pub struct Embedded {
    pub value: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reflectz=debug")),
        )
        .with_target(false)
        .init();

    let my_struct = MyStruct {
        id: 10,
        email: "foo@bar.com".to_string(),
        info: Another::default(),
    };

    let config = Config::builder().naming_tag("json").build();
    for field in inspect_with(&my_struct, &config)? {
        println!(
            "{:<12} kind={:<7} path={:?} value={} zero={} tags={}",
            field.name, field.kind, field.path, field.value, field.is_zero, field.tags
        );
    }
    println!("{}", serde_json::to_string_pretty(&inspect(&my_struct)?)?);

    let mut example = Example {
        data: Embedded {
            value: "original".to_string(),
        },
    };
    let fields = inspect(&example)?;
    set_field(&mut example, &fields[0].path, "newValue".to_string())?;
    println!("{example:?}");

    Ok(())
}
