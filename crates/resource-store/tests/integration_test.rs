use resource_store::{Repository, ResourceStore, StoreEntity};
use std::collections::HashSet;
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Document {
    id: u64,
    title: String,
    revision: u32,
}

#[derive(Debug)]
struct DocumentCreate {
    title: String,
}

#[derive(Debug)]
struct DocumentUpdate {
    title: Option<String>,
}

impl StoreEntity for Document {
    type Id = u64;
    type Create = DocumentCreate;
    type Update = DocumentUpdate;
    type Query = String;

    fn from_create_params(id: u64, params: DocumentCreate) -> Self {
        Self {
            id,
            title: params.title,
            revision: 1,
        }
    }

    fn on_update(&mut self, update: DocumentUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        self.revision += 1;
    }

    fn matches(&self, prefix: &String) -> bool {
        self.title.starts_with(prefix.as_str())
    }
}

fn draft(title: &str) -> DocumentCreate {
    DocumentCreate {
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_repository_contract_through_trait_object() {
    let repo: Arc<dyn Repository<Document>> = Arc::new(ResourceStore::<Document>::new());

    let created = repo.create(draft("Design notes")).await;
    assert_eq!(created.id, 1);
    assert_eq!(repo.get(&created.id).await, Some(created.clone()));

    let updated = repo
        .update(&created.id, DocumentUpdate { title: None })
        .await
        .expect("document exists");
    assert_eq!(updated.title, "Design notes");
    assert_eq!(updated.revision, 2);

    repo.create(draft("Meeting minutes")).await;
    assert_eq!(repo.search(&"Design".to_string()).await.len(), 1);
    assert_eq!(repo.list().await.len(), 2);

    assert!(repo.delete(&created.id).await);
    assert!(!repo.delete(&created.id).await);
    assert!(repo.get(&created.id).await.is_none());
    assert!(repo
        .update(&created.id, DocumentUpdate { title: None })
        .await
        .is_none());
}

/// Many tasks creating at once must never share an id or lose a record.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(ResourceStore::<Document>::new());

    let mut handles = vec![];
    for i in 0..200 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(draft(&format!("doc-{}", i))).id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id handed out");
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 200);
    assert_eq!(ids.iter().copied().min(), Some(1));
    assert_eq!(ids.iter().copied().max(), Some(200));
}

/// Readers running alongside writers only ever see fully built records.
#[test]
fn test_readers_never_observe_partial_updates() {
    let store = Arc::new(ResourceStore::<Document>::new());
    let doc = store.create(draft("v1"));

    let writer = {
        let store = store.clone();
        std::thread::spawn(move || {
            for n in 2..=500u32 {
                store.update(
                    &doc.id,
                    DocumentUpdate {
                        title: Some(format!("v{}", n)),
                    },
                );
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..500 {
                    let seen = store.get(&doc.id).expect("never deleted");
                    // title and revision are written under the same guard
                    assert_eq!(seen.title, format!("v{}", seen.revision));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.get(&doc.id).unwrap().revision, 500);
}
