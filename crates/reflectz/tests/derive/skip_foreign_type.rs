use std::sync::Mutex;

use reflectz::{Reflect, inspect};

pub struct Handle;

#[derive(Reflect)]
pub struct Session {
    pub user: String,
    #[reflectz(skip)]
    pub handle: Handle,
    #[reflectz(skip)]
    lock: Mutex<()>,
}

#[derive(Reflect)]
pub struct Pooled<C> {
    pub name: String,
    #[reflectz(skip)]
    pub conn: Option<C>,
}

pub fn main() {
    let session = Session {
        user: "ada".to_string(),
        handle: Handle,
        lock: Mutex::new(()),
    };
    let _guard = session.lock.lock();
    let fields = inspect(&session).unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "user");

    let pooled = Pooled {
        name: "primary".to_string(),
        conn: Some(Handle),
    };
    let fields = inspect(&pooled).unwrap();
    assert_eq!(fields.len(), 1);
}
