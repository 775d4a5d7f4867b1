// ABOUTME: Integration tests for category and question storage
// ABOUTME: Exercises CRUD, search, category filtering, and quiz candidate exclusion

use pretty_assertions::assert_eq;
use sqlx::SqlitePool;
use trivia_core::QuestionCreateInput;
use trivia_storage::{
    init_memory_pool, CategoryRepository, CategoryStorage, QuestionRepository, QuestionStorage,
};

async fn create_test_db() -> SqlitePool {
    init_memory_pool().await.unwrap()
}

fn input(question: &str, answer: &str, category: i64, difficulty: i64) -> QuestionCreateInput {
    QuestionCreateInput {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

#[tokio::test]
async fn test_list_seeded_categories() {
    let storage = CategoryStorage::new(create_test_db().await);

    let categories = storage.list_categories().await.unwrap();
    let labels: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();

    assert_eq!(
        labels,
        vec!["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
    assert_eq!(categories[0].id, 1);
}

#[tokio::test]
async fn test_get_category() {
    let storage = CategoryStorage::new(create_test_db().await);

    let art = storage.get_category(2).await.unwrap().unwrap();
    assert_eq!(art.kind, "Art");

    assert!(storage.get_category(1000).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_and_get_question() {
    let storage = QuestionStorage::new(create_test_db().await);

    let created = storage
        .insert_question(input("What is the boiling point of water?", "100C", 1, 1))
        .await
        .unwrap();

    let fetched = storage.get_question(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.answer, "100C");
    assert_eq!(storage.count_questions().await.unwrap(), 1);
}

#[tokio::test]
async fn test_list_questions_in_id_order() {
    let storage = QuestionStorage::new(create_test_db().await);

    for i in 0..3 {
        storage
            .insert_question(input(&format!("Question {}", i), "A", 1, 1))
            .await
            .unwrap();
    }

    let questions = storage.list_questions().await.unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_delete_question() {
    let storage = QuestionStorage::new(create_test_db().await);

    let keep = storage.insert_question(input("Keep me", "A", 1, 1)).await.unwrap();
    let doomed = storage.insert_question(input("Delete me", "A", 1, 1)).await.unwrap();

    assert!(storage.delete_question(doomed.id).await.unwrap());
    assert!(storage.get_question(doomed.id).await.unwrap().is_none());
    assert!(storage.get_question(keep.id).await.unwrap().is_some());
    assert_eq!(storage.count_questions().await.unwrap(), 1);

    // Second delete finds nothing
    assert!(!storage.delete_question(doomed.id).await.unwrap());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let storage = QuestionStorage::new(create_test_db().await);

    storage
        .insert_question(input("What is the title of the first Harry Potter book?", "A", 5, 2))
        .await
        .unwrap();
    storage
        .insert_question(input("Which planet is largest?", "Jupiter", 1, 1))
        .await
        .unwrap();

    let hits = storage.search_questions("TITLE").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].question.contains("title"));

    assert!(storage.search_questions("zebra").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let storage = QuestionStorage::new(create_test_db().await);

    storage.insert_question(input("Is 50% a half?", "Yes", 1, 1)).await.unwrap();
    storage.insert_question(input("Plain question", "No", 1, 1)).await.unwrap();

    assert_eq!(storage.search_questions("%").await.unwrap().len(), 1);
    assert_eq!(storage.search_questions("_").await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_empty_search_term_matches_everything() {
    let storage = QuestionStorage::new(create_test_db().await);

    storage.insert_question(input("One", "A", 1, 1)).await.unwrap();
    storage.insert_question(input("Two", "A", 2, 1)).await.unwrap();

    assert_eq!(storage.search_questions("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_questions_by_category() {
    let storage = QuestionStorage::new(create_test_db().await);

    storage.insert_question(input("Science one", "A", 1, 1)).await.unwrap();
    storage.insert_question(input("Art one", "A", 2, 1)).await.unwrap();
    storage.insert_question(input("Art two", "A", 2, 3)).await.unwrap();

    let art = storage.questions_by_category(2).await.unwrap();
    assert_eq!(art.len(), 2);
    assert!(art.iter().all(|q| q.category == 2));

    assert!(storage.questions_by_category(6).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_quiz_candidates_exclude_previous_questions() {
    let storage = QuestionStorage::new(create_test_db().await);

    let a = storage.insert_question(input("A", "a", 1, 1)).await.unwrap();
    let b = storage.insert_question(input("B", "b", 1, 1)).await.unwrap();
    let c = storage.insert_question(input("C", "c", 2, 1)).await.unwrap();

    let all = storage.quiz_candidates(&[], None).await.unwrap();
    assert_eq!(all.len(), 3);

    let remaining = storage.quiz_candidates(&[a.id, c.id, a.id], None).await.unwrap();
    assert_eq!(remaining.iter().map(|q| q.id).collect::<Vec<_>>(), vec![b.id]);

    let science = storage.quiz_candidates(&[b.id], Some(1)).await.unwrap();
    assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a.id]);

    let exhausted = storage
        .quiz_candidates(&[a.id, b.id, c.id], None)
        .await
        .unwrap();
    assert!(exhausted.is_empty());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let storage = QuestionStorage::new(create_test_db().await);

    let etoile = storage
        .insert_question(input("Who painted ÉTOILE?", "Degas", 2, 2))
        .await
        .unwrap();
    storage
        .insert_question(input("Wie heißt die Hauptstadt?", "Berlin", 3, 1))
        .await
        .unwrap();

    let hits = storage.search_questions("étoile").await.unwrap();
    assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![etoile.id]);

    assert_eq!(storage.search_questions("WIE HEIßT").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_quiz_candidates_with_huge_exclusion_list() {
    let storage = QuestionStorage::new(create_test_db().await);

    let a = storage.insert_question(input("A", "a", 1, 1)).await.unwrap();
    let b = storage.insert_question(input("B", "b", 1, 1)).await.unwrap();

    // Well past SQLite's bound-variable limit
    let mut previous: Vec<i64> = (1_000_000..1_040_000).collect();
    previous.push(a.id);

    let remaining = storage.quiz_candidates(&previous, None).await.unwrap();
    assert_eq!(remaining.iter().map(|q| q.id).collect::<Vec<_>>(), vec![b.id]);

    let science = storage.quiz_candidates(&previous, Some(1)).await.unwrap();
    assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![b.id]);
}
