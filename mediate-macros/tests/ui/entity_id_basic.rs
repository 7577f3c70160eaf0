use mediate_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct OrderId(Uuid);

#[entity_id]
struct SkuCode(String);

fn main() {
    let id = OrderId::new(Uuid::new_v4());
    let shown = id.to_string();
    let parsed: OrderId = shown.parse().unwrap();
    assert_eq!(parsed, id);

    let code: SkuCode = "sku-1".parse().unwrap();
    assert_eq!(code.value().as_str(), "sku-1");
    let raw: String = code.into();
    assert_eq!(raw, "sku-1");
}
