use std::time::Duration;

use luxe_cache::{Cache, FileStore};
use luxe_storefront::prelude::*;

fn file_config(dir: &std::path::Path) -> StorefrontConfig {
    StorefrontConfig {
        storage: StorageConfig::File {
            dir: dir.join("state"),
        },
        ..StorefrontConfig::instant()
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Amelia".to_string(),
        last_name: "Stone".to_string(),
        email: "amelia@luxegems.com".to_string(),
        address: "123 Radiant Street".to_string(),
        city: "New York".to_string(),
        postal_code: "10001".to_string(),
        payment_method: PaymentChoice::PayPal,
        ..CheckoutForm::default()
    }
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    {
        let mut storefront = Storefront::from_config(&config).unwrap();
        storefront
            .auth
            .login("amelia@luxegems.com", "password123")
            .await
            .unwrap();
        storefront
            .add_to_cart(
                &ProductId::new("prod-1"),
                VariantSelection::new(Some("6"), Some("Yellow Gold")),
                2,
            )
            .await
            .unwrap();
        storefront.apply_coupon_code("luxe15").unwrap();
        storefront.wishlist.add(ProductId::new("prod-5"));
    }

    let storefront = Storefront::from_config(&config).unwrap();
    assert!(storefront.auth.is_authenticated());
    assert_eq!(storefront.cart.item_count(), 2);
    assert_eq!(
        storefront.cart.coupon().map(|c| c.code.as_str()),
        Some("LUXE15")
    );
    assert!(storefront.wishlist.contains(&ProductId::new("prod-5")));

    // Entries are camelCase JSON, one file per key.
    let cache = Cache::new(std::sync::Arc::new(
        FileStore::open(dir.path().join("state")).unwrap(),
    ));
    let cart: serde_json::Value = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(cart["items"][0]["productId"], "prod-1");
    assert_eq!(cart["items"][0]["maxQuantity"], 8);
}

#[tokio::test]
async fn test_corrupt_state_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());
    std::fs::create_dir_all(dir.path().join("state")).unwrap();
    std::fs::write(dir.path().join("state/jewellery-cart.json"), "{not json").unwrap();

    let mut storefront = Storefront::from_config(&config).unwrap();
    assert!(storefront.cart.is_empty());

    storefront
        .add_to_cart(&ProductId::new("prod-3"), VariantSelection::default(), 1)
        .await
        .unwrap();
    let restored = Storefront::from_config(&config).unwrap();
    assert_eq!(restored.cart.item_count(), 1);
}

#[tokio::test]
async fn test_checkout_empties_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    let mut storefront = Storefront::from_config(&config).unwrap();
    storefront
        .add_to_cart(&ProductId::new("prod-2"), VariantSelection::default(), 1)
        .await
        .unwrap();
    let total = storefront.cart.summary().total;

    let order = storefront.checkout(&checkout_form()).await.unwrap();
    assert_eq!(order.summary.total, total);
    assert_eq!(order.email, "amelia@luxegems.com");

    let restored = Storefront::from_config(&config).unwrap();
    assert!(restored.cart.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_updates_listing() {
    let config = StorefrontConfig::default();
    let mut storefront = Storefront::from_config(&config).unwrap();
    storefront.products.refresh().await;

    storefront.search.input("pearl");
    tokio::time::sleep(Duration::from_millis(100)).await;
    storefront.search.input("tennis");
    assert_eq!(storefront.poll_search(), None);

    assert_eq!(storefront.next_search().await, Some("tennis".to_string()));
    let names: Vec<&str> = storefront
        .products
        .filtered()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Iris Tennis Bracelet"]);

    storefront.search.input("gold");
    storefront.leave_listing();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(storefront.poll_search(), None);
    assert_eq!(storefront.products.filters().query, "tennis");
}
