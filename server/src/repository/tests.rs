//! Repository Integration Tests
//!
//! Tests for UserRepository and PetRepository with in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Pet, User};
    use crate::repository::{init_db, PetRepository, Repository, UserRepository};
    use std::path::PathBuf;

    const NOW: i64 = 1_700_000_000_000;

    async fn setup_test_db() -> (UserRepository, PetRepository) {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        (
            UserRepository::new(db_state.connection()),
            PetRepository::new(db_state.connection()),
        )
    }

    async fn create_user(users: &UserRepository, name: &str) -> User {
        let user = User::new(name, &format!("{}@pets.dev", name), "hash".to_string());
        users.create(&user).await.expect("Failed to create user")
    }

    #[tokio::test]
    async fn test_create_user_normalizes() {
        let (users, _) = setup_test_db().await;

        let user = User::new(" Mochi ", "MOCHI@Pets.dev ", "hash".to_string());
        let created = users.create(&user).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.username, "mochi");
        assert_eq!(created.email, "mochi@pets.dev");
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_find_user_by_username_and_email() {
        let (users, _) = setup_test_db().await;
        let created = create_user(&users, "pixel").await;

        let by_name = users.find_by_username("  PIXEL").await.unwrap();
        assert_eq!(by_name.map(|u| u.id), Some(created.id));

        let by_email = users.find_by_email("Pixel@Pets.dev").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));

        assert!(users.find_by_username("ghost").await.unwrap().is_none());
        assert!(users.find_by_username("   ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let (users, _) = setup_test_db().await;
        create_user(&users, "pixel").await;

        let dup = User::new("PIXEL", "other@pets.dev", "hash".to_string());
        let err = users.create(&dup).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("Username already taken".into()));

        let dup = User::new("other", "pixel@pets.dev", "hash".to_string());
        let err = users.create(&dup).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("Email already registered".into()));
    }

    #[tokio::test]
    async fn test_update_and_delete_user() {
        let (users, _) = setup_test_db().await;
        let mut user = create_user(&users, "pixel").await;

        user.username = "Sprite".to_string();
        let updated = users.update(&user).await.expect("Update failed");
        assert_eq!(updated.username, "sprite");

        users.delete(user.id).await.expect("Delete failed");
        assert!(users.find_by_id(user.id).await.unwrap().is_none());

        let err = users.delete(user.id).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound(format!("User not found: {}", user.id)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let (users, _) = setup_test_db().await;
        create_user(&users, "one").await;
        create_user(&users, "two").await;

        let all = users.list().await.expect("List failed");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "one");
    }

    #[tokio::test]
    async fn test_create_and_find_pet() {
        let (users, pets) = setup_test_db().await;
        let owner = create_user(&users, "pixel").await;

        let pet = Pet::adopt(owner.id, "Mochi", "Cat", NOW);
        let created = pets.create(&pet).await.expect("Failed to create pet");
        assert!(created.id > 0);

        let found = pets.find_by_id(created.id).await.unwrap().expect("pet exists");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_pet_requires_existing_owner() {
        let (_, pets) = setup_test_db().await;

        let pet = Pet::adopt(999, "Ghost", "Cat", NOW);
        let err = pets.create(&pet).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("User not found: 999".into()));
    }

    #[tokio::test]
    async fn test_list_pets_by_user() {
        let (users, pets) = setup_test_db().await;
        let a = create_user(&users, "alice").await;
        let b = create_user(&users, "bobby").await;

        pets.create(&Pet::adopt(a.id, "Mochi", "Cat", NOW)).await.unwrap();
        pets.create(&Pet::adopt(a.id, "Rex", "Dog", NOW)).await.unwrap();
        pets.create(&Pet::adopt(b.id, "Ember", "Dragon", NOW)).await.unwrap();

        let alice_pets = pets.list_by_user(a.id).await.unwrap();
        assert_eq!(alice_pets.len(), 2);
        assert_eq!(alice_pets[0].name, "Mochi");
        assert_eq!(pets.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_and_save_all_pets() {
        let (users, pets) = setup_test_db().await;
        let owner = create_user(&users, "pixel").await;
        let mut first = pets.create(&Pet::adopt(owner.id, "Mochi", "Cat", NOW)).await.unwrap();
        let mut second = pets.create(&Pet::adopt(owner.id, "Rex", "Dog", NOW)).await.unwrap();

        first.fullness = 42;
        pets.update(&first).await.expect("Update failed");
        assert_eq!(pets.find_by_id(first.id).await.unwrap().unwrap().fullness, 42);

        first.energy = 10;
        second.happiness = 5;
        pets.save_all(&[first.clone(), second.clone()]).await.expect("Save failed");

        let stored = pets.list_by_user(owner.id).await.unwrap();
        assert_eq!(stored[0].energy, 10);
        assert_eq!(stored[1].happiness, 5);
    }

    #[tokio::test]
    async fn test_delete_pet() {
        let (users, pets) = setup_test_db().await;
        let owner = create_user(&users, "pixel").await;
        let pet = pets.create(&Pet::adopt(owner.id, "Mochi", "Cat", NOW)).await.unwrap();

        pets.delete(pet.id).await.expect("Delete failed");
        assert!(pets.find_by_id(pet.id).await.unwrap().is_none());
        assert!(pets.delete(pet.id).await.is_err());
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_pets() {
        let (users, pets) = setup_test_db().await;
        let owner = create_user(&users, "pixel").await;
        let pet = pets.create(&Pet::adopt(owner.id, "Mochi", "Cat", NOW)).await.unwrap();

        users.delete(owner.id).await.expect("Delete failed");

        assert!(pets.find_by_id(pet.id).await.unwrap().is_none());
        assert!(pets.list_by_user(owner.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_missing_rows_by_kind() {
        let (users, pets) = setup_test_db().await;
        let owner = create_user(&users, "pixel").await;

        assert_eq!(users.fetch(owner.id).await.unwrap().username, "pixel");
        assert_eq!(
            pets.fetch(42).await.unwrap_err(),
            DomainError::NotFound("Pet not found: 42".into())
        );
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pets.db");

        {
            let db = init_db(&path).await.unwrap();
            let users = UserRepository::new(db.connection());
            create_user(&users, "pixel").await;
        }

        let db = init_db(&path).await.unwrap();
        let users = UserRepository::new(db.connection());
        assert!(users.find_by_username("pixel").await.unwrap().is_some());
    }
}
