//! Sample roster the app starts with.

use crate::category::Category;
use crate::discussion::{Discussion, DiscussionMessage};
use crate::story::{Comment, Story};
use crate::user::User;

const AUTHOR_AVATAR: &str = "person.crop.circle.fill";

#[derive(Clone, Debug)]
pub struct SeedData {
    pub current_user: User,
    pub stories: Vec<Story>,
    pub discussions: Vec<Discussion>,
}

pub fn current_user() -> User {
    User::with_profile(
        "Иван Иванов",
        "ivan@example.com",
        "person.circle.fill",
        "Студент дизайна, увлекаюсь архитектурой и современным искусством",
    )
}

pub fn load() -> SeedData {
    let mut current_user = current_user();
    let mut stories = load_stories();
    let discussions = load_discussions();

    // Stories 0 and 2 start out saved.
    for index in [0, 2] {
        if let Some(story) = stories.get_mut(index) {
            story.is_saved = true;
            current_user.saved_stories.push(story.id);
        }
    }

    log::info!(
        "seed loaded - stories: {}, discussions: {}",
        stories.len(),
        discussions.len()
    );

    SeedData {
        current_user,
        stories,
        discussions,
    }
}

fn load_stories() -> Vec<Story> {
    let anna = User::with_profile(
        "Анна Смирнова",
        "anna@example.com",
        AUTHOR_AVATAR,
        "Архитектор и урбанист",
    );
    let mikhail = User::with_profile(
        "Михаил Петров",
        "mikhail@example.com",
        AUTHOR_AVATAR,
        "UX/UI дизайнер",
    );
    let elena = User::with_profile(
        "Елена Козлова",
        "elena@example.com",
        AUTHOR_AVATAR,
        "Художник и иллюстратор",
    );
    let igor = User::with_profile(
        "Игорь Сидоров",
        "igor@example.com",
        AUTHOR_AVATAR,
        "Студент архитектуры",
    );

    vec![
        Story::new(
            "Новая архитектура московских парков",
            "Исследование современных подходов к проектированию общественных пространств. Как архитекторы создают места для отдыха, учитывая потребности разных групп населения...",
            anna,
            Category::Architecture,
        )
        .with_likes(128)
        .with_tags(&["архитектура", "парки", "москва", "урбанизм"])
        .with_comments(vec![
            Comment::new(
                mikhail.clone(),
                "Отличная статья! Очень актуальная тема для нашего города.",
            ),
            Comment::new(
                igor,
                "Согласен с автором. Нужно больше внимания уделять инклюзивным решениям в парках.",
            ),
        ]),
        Story::new(
            "Принципы минималистичного дизайна",
            "Разбираем основы минимализма в цифровом дизайне. Как создавать интерфейсы, которые фокусируют внимание пользователя на главном...",
            mikhail.clone(),
            Category::Design,
        )
        .with_likes(89)
        .with_tags(&["дизайн", "минимализм", "UI/UX", "интерфейсы"]),
        Story::new(
            "Современное искусство и технологии",
            "Как цифровые технологии меняют мир искусства. От NFT до интерактивных инсталляций - обзор современных тенденций...",
            elena,
            Category::Art,
        )
        .with_likes(67)
        .with_tags(&["искусство", "технологии", "NFT", "цифровое искусство"]),
        Story::new(
            "Стартап-культура в творческих индустриях",
            "Анализ того, как принципы стартапов применяются в креативных проектах. Истории успеха и неудач...",
            mikhail,
            Category::Business,
        )
        .with_likes(45)
        .with_tags(&["бизнес", "стартапы", "креатив", "предпринимательство"]),
    ]
}

fn load_discussions() -> Vec<Discussion> {
    let dmitry = User::with_profile(
        "Дмитрий Волков",
        "dmitry@example.com",
        AUTHOR_AVATAR,
        "Product Designer",
    );
    let olga = User::with_profile(
        "Ольга Иванова",
        "olga@example.com",
        AUTHOR_AVATAR,
        "Архитектор интерьеров",
    );
    let anna = User::with_profile(
        "Анна Смирнова",
        "anna@example.com",
        AUTHOR_AVATAR,
        "Архитектор и урбанист",
    );

    vec![
        Discussion::new(
            "Будущее удаленной работы для дизайнеров",
            "Обсуждаем, как изменилась работа дизайнеров после пандемии и что нас ждет дальше",
            dmitry.clone(),
            Category::Design,
            23,
        )
        .with_messages(vec![
            DiscussionMessage::new(
                dmitry.clone(),
                "Я думаю, что удаленная работа навсегда изменила индустрию дизайна. Теперь мы можем работать с командами по всему миру!",
            ),
            DiscussionMessage::new(
                olga.clone(),
                "Согласна! Но есть и минусы - сложнее проводить креативные сессии и мозговые штурмы онлайн.",
            ),
            DiscussionMessage::new(
                anna.clone(),
                "Главное - найти баланс между удаленкой и офисной работой. Гибридная модель кажется оптимальной.",
            ),
        ]),
        Discussion::new(
            "Устойчивая архитектура: миф или реальность?",
            "Говорим о экологических аспектах современного строительства",
            olga.clone(),
            Category::Architecture,
            15,
        )
        .with_messages(vec![
            DiscussionMessage::new(
                olga.clone(),
                "Экологичность в архитектуре - это не просто тренд, а необходимость. Мы должны думать о будущих поколениях.",
            ),
            DiscussionMessage::new(
                anna,
                "Полностью поддерживаю! Использование переработанных материалов и возобновляемых источников энергии - ключевые аспекты.",
            ),
        ]),
        Discussion::new(
            "AI в творческих профессиях",
            "Как искусственный интеллект влияет на творческие процессы",
            dmitry.clone(),
            Category::Technology,
            31,
        )
        .with_messages(vec![
            DiscussionMessage::new(
                dmitry,
                "ИИ может стать отличным помощником, но никогда не заменит человеческую креативность и эмоции в дизайне.",
            ),
            DiscussionMessage::new(
                olga,
                "Интересно наблюдать, как AI помогает в генерации идей. Главное - использовать его как инструмент, а не замену творчеству.",
            ),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_roster() {
        let seed = load();

        assert_eq!(seed.current_user.name, "Иван Иванов");
        assert_eq!(seed.stories.len(), 4);
        assert_eq!(seed.discussions.len(), 3);
        assert_eq!(seed.stories[0].title, "Новая архитектура московских парков");
        assert_eq!(seed.stories[0].likes, 128);
        assert_eq!(seed.stories[0].comments.len(), 2);

        let participants: Vec<u32> = seed.discussions.iter().map(|d| d.participants).collect();
        assert_eq!(participants, vec![23, 15, 31]);
    }

    #[test]
    fn test_seed_saved_flags_match_saved_list() {
        let seed = load();

        for story in &seed.stories {
            assert_eq!(story.is_saved, seed.current_user.has_saved(&story.id));
        }
        assert_eq!(
            seed.current_user.saved_stories,
            vec![seed.stories[0].id, seed.stories[2].id]
        );
    }

    #[test]
    fn test_seed_ids_unique() {
        let seed = load();

        let story_ids: HashSet<_> = seed.stories.iter().map(|s| s.id).collect();
        assert_eq!(story_ids.len(), seed.stories.len());

        let comment_ids: Vec<_> = seed
            .stories
            .iter()
            .flat_map(|s| s.comments.iter().map(|c| c.id))
            .collect();
        let unique_comment_ids: HashSet<_> = comment_ids.iter().collect();
        assert_eq!(unique_comment_ids.len(), comment_ids.len());

        let message_ids: Vec<_> = seed
            .discussions
            .iter()
            .flat_map(|d| d.messages.iter().map(|m| m.id))
            .collect();
        let unique_message_ids: HashSet<_> = message_ids.iter().collect();
        assert_eq!(unique_message_ids.len(), message_ids.len());
    }

    #[test]
    fn test_seed_last_activity_not_before_created_at() {
        for discussion in load().discussions {
            assert!(discussion.last_activity >= discussion.created_at);
        }
    }
}
