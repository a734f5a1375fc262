use jotterapp::api::JotterApi;
use jotterapp::config::ErrorDisclosure;
use jotterapp::error::JotterError;
use jotterapp::identity::Identity;
use jotterapp::model::{DocumentId, DocumentUpdate};
use jotterapp::store::memory::InMemoryStore;

fn setup() -> (JotterApi<InMemoryStore>, Identity) {
    let api = JotterApi::new(InMemoryStore::new(), ErrorDisclosure::Conceal);
    (api, Identity::new("alice").unwrap())
}

fn create(
    api: &mut JotterApi<InMemoryStore>,
    who: &Identity,
    title: &str,
    parent: Option<DocumentId>,
) -> DocumentId {
    api.create_document(Some(who), title.to_string(), parent)
        .unwrap()
        .primary_id()
        .unwrap()
}

#[test]
fn test_archive_restore_scenario() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "A", None);
    let b = create(&mut api, &alice, "B", Some(a));

    api.archive_document(Some(&alice), &a).unwrap();
    let trash = api.get_trash(Some(&alice), None).unwrap();
    assert_eq!(trash.listed_documents.len(), 2);
    assert!(api.get_sidebar(Some(&alice), None).unwrap().listed_documents.is_empty());

    let restored = api.restore_document(Some(&alice), &a).unwrap();
    assert_eq!(restored.affected_documents.len(), 2);
    let b_doc = api.get_by_id(Some(&alice), &b).unwrap().listed_documents[0].clone();
    assert!(!b_doc.is_archived);
    assert_eq!(b_doc.parent_id, Some(a));
    assert!(api.get_trash(Some(&alice), None).unwrap().listed_documents.is_empty());
}

#[test]
fn test_restore_child_of_trashed_parent() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "A", None);
    let b = create(&mut api, &alice, "B", Some(a));
    let c = create(&mut api, &alice, "C", Some(b));

    api.archive_document(Some(&alice), &a).unwrap();
    api.restore_document(Some(&alice), &b).unwrap();

    let roots = api.get_sidebar(Some(&alice), None).unwrap();
    assert_eq!(roots.listed_documents.len(), 1);
    assert_eq!(roots.listed_documents[0].id, b);
    assert!(roots.listed_documents[0].parent_id.is_none());

    let under_b = api.get_sidebar(Some(&alice), Some(b)).unwrap();
    assert_eq!(under_b.listed_documents[0].id, c);

    let trash = api.get_trash(Some(&alice), None).unwrap();
    assert_eq!(trash.listed_documents.len(), 1);
    assert_eq!(trash.listed_documents[0].id, a);
}

#[test]
fn test_remove_orphans_children() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "A", None);
    let b = create(&mut api, &alice, "B", Some(a));

    api.archive_document(Some(&alice), &a).unwrap();
    api.remove_document(Some(&alice), &a, false).unwrap();

    assert!(matches!(
        api.get_by_id(Some(&alice), &a),
        Err(JotterError::Unauthorized)
    ));
    let orphan = api.get_by_id(Some(&alice), &b).unwrap().listed_documents[0].clone();
    assert_eq!(orphan.parent_id, Some(a));

    // Restoring the orphan brings it back at the top level.
    api.restore_document(Some(&alice), &b).unwrap();
    let roots = api.get_sidebar(Some(&alice), None).unwrap();
    assert_eq!(roots.listed_documents[0].id, b);
}

#[test]
fn test_recursive_remove() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "A", None);
    let b = create(&mut api, &alice, "B", Some(a));

    let removed = api.remove_document(Some(&alice), &a, true).unwrap();
    assert_eq!(removed.affected_documents.len(), 2);
    assert!(api.get_by_id(Some(&alice), &b).is_err());
    assert!(api.get_search(Some(&alice), None).unwrap().listed_documents.is_empty());
}

#[test]
fn test_other_users_cannot_touch_documents() {
    let (mut api, alice) = setup();
    let bob = Identity::new("bob").unwrap();
    let a = create(&mut api, &alice, "A", None);
    let b = create(&mut api, &alice, "B", Some(a));

    assert!(matches!(
        api.archive_document(Some(&bob), &a),
        Err(JotterError::Unauthorized)
    ));
    assert!(matches!(
        api.remove_document(Some(&bob), &a, true),
        Err(JotterError::Unauthorized)
    ));
    assert!(matches!(
        api.update_document(
            Some(&bob),
            &b,
            DocumentUpdate {
                title: Some("Mine now".into()),
                ..Default::default()
            }
        ),
        Err(JotterError::Unauthorized)
    ));
    assert!(matches!(
        api.remove_icon(Some(&bob), &b),
        Err(JotterError::Unauthorized)
    ));

    assert!(api.get_sidebar(Some(&bob), None).unwrap().listed_documents.is_empty());
    assert!(api.get_search(Some(&bob), None).unwrap().listed_documents.is_empty());
    let tree = api.get_tree(Some(&alice)).unwrap().tree;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].subtree_size(), 2);
    assert_eq!(tree[0].children[0].document.title, "B");
}

#[test]
fn test_publish_gating() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "Post", None);

    assert!(matches!(
        api.get_published_by_id(&a),
        Err(JotterError::InvalidState(_))
    ));

    api.update_document(Some(&alice), &a, DocumentUpdate::published(true))
        .unwrap();
    let public = api.get_published_by_id(&a).unwrap();
    assert_eq!(public.listed_documents[0].title, "Post");

    api.archive_document(Some(&alice), &a).unwrap();
    assert!(matches!(
        api.get_published_by_id(&a),
        Err(JotterError::InvalidState(_))
    ));
}

#[test]
fn test_search_and_trash_filters() {
    let (mut api, alice) = setup();
    create(&mut api, &alice, "Meeting notes", None);
    let old = create(&mut api, &alice, "Old meeting", None);
    create(&mut api, &alice, "Recipes", None);
    api.archive_document(Some(&alice), &old).unwrap();

    let found = api.get_search(Some(&alice), Some("meeting")).unwrap();
    assert_eq!(found.listed_documents.len(), 1);
    assert_eq!(found.listed_documents[0].title, "Meeting notes");

    let trashed = api.get_trash(Some(&alice), Some("meet")).unwrap();
    assert_eq!(trashed.listed_documents.len(), 1);
    assert_eq!(trashed.listed_documents[0].id, old);
    assert!(api
        .get_trash(Some(&alice), Some("recipes"))
        .unwrap()
        .listed_documents
        .is_empty());
}

#[test]
fn test_anonymous_caller() {
    let (mut api, alice) = setup();
    let a = create(&mut api, &alice, "A", None);

    assert!(matches!(
        api.create_document(None, "X".into(), None),
        Err(JotterError::Unauthorized)
    ));
    assert!(matches!(
        api.get_sidebar(None, None),
        Err(JotterError::Unauthorized)
    ));
    assert!(matches!(
        api.restore_document(None, &a),
        Err(JotterError::Unauthorized)
    ));
}
