//! Both item backends behave the same through the `ItemRepository` port.

use catalog_core::{
    CatalogConfig, CatalogCore, ImageUpload, Item, NewItem, RepositoryError, StorageBackend,
    content_address,
};
use catalog_db::StoreFactory;

const BACKENDS: [StorageBackend; 2] = [StorageBackend::Json, StorageBackend::Sqlite];

#[tokio::test]
async fn serial_appends_list_in_call_order() {
    for backend in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(backend, dir.path());
        let stores = StoreFactory::build_stores(&config).await.unwrap();

        let expected: Vec<Item> = (1..=5)
            .map(|i| Item::new(format!("item-{i}"), format!("cat-{}", i % 2)))
            .collect();
        for item in &expected {
            stores.items.append(item).await.unwrap();
        }

        assert_eq!(stores.items.list_all().await.unwrap(), expected, "{backend}");
        for (i, item) in expected.iter().enumerate() {
            let index = i64::try_from(i).unwrap() + 1;
            assert_eq!(&stores.items.get_by_index(index).await.unwrap(), item);
        }
        for index in [0, -1, 6, i64::MIN, i64::MAX] {
            assert!(
                matches!(
                    stores.items.get_by_index(index).await,
                    Err(RepositoryError::IndexOutOfRange(i)) if i == index
                ),
                "{backend} index {index}"
            );
        }
    }
}

#[tokio::test]
async fn shirt_and_pot_end_to_end() {
    for backend in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(backend, dir.path());
        let core = CatalogCore::new(StoreFactory::build_stores(&config).await.unwrap());

        core.items()
            .add(NewItem::new("shirt", "fashion"))
            .await
            .unwrap();
        let pot = core
            .items()
            .add(NewItem::new("pot", "kitchen").with_image(ImageUpload::new("pot.jpg", b"pot".to_vec())))
            .await
            .unwrap();

        assert_eq!(pot.image_name.as_deref(), Some(content_address(b"pot").as_str()));
        assert_eq!(core.items().get(2).await.unwrap(), pot);

        let names: Vec<_> = core
            .items()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["shirt", "pot"]);

        let path = core.images().resolve(pot.image_name.as_deref().unwrap()).await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"pot");
    }
}

#[tokio::test]
async fn stores_survive_reopen() {
    for backend in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(backend, dir.path());

        {
            let stores = StoreFactory::build_stores(&config).await.unwrap();
            stores.items.append(&Item::new("shirt", "fashion")).await.unwrap();
        }

        let stores = StoreFactory::build_stores(&config).await.unwrap();
        assert_eq!(
            stores.items.list_all().await.unwrap(),
            vec![Item::new("shirt", "fashion")],
            "{backend}"
        );
        assert!(config.item_store_path().exists());
        assert!(config.images_dir.is_dir());
    }
}

#[tokio::test]
async fn rejected_upload_appends_nothing() {
    for backend in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(backend, dir.path());
        let core = CatalogCore::new(StoreFactory::build_stores(&config).await.unwrap());

        let result = core
            .items()
            .add(NewItem::new("pot", "kitchen").with_image(ImageUpload::new("pot.png", b"pot".to_vec())))
            .await;

        assert!(result.is_err());
        assert!(core.items().list().await.unwrap().is_empty());
    }
}
