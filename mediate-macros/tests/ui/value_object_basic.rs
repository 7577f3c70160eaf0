use mediate_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object]
struct Wrapper(String);

#[value_object]
enum Level {
    Low,
    High,
}

fn main() {
    // Debug/Clone/PartialEq 可用（编译期检查足矣）
    let a = Amount { value: 0 };
    let _ = format!("{:?}", a);
    let b = a.clone();
    let _eq = b == Amount { value: 0 };

    let w = Wrapper("x".into());
    let _json = serde_json::to_string(&w).unwrap();

    let _lv = Level::Low;
}
