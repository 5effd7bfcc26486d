#![allow(dead_code)]

use grid_data::domain::user::User;

/// Five users with distinct ids, deliberately out of id order.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(4)
            .name("Patricia Lebsack")
            .username("Karianne")
            .email("julianne@kory.org")
            .title("Engineer"),
        User::new(1)
            .name("Leanne Graham")
            .username("Bret")
            .email("sincere@april.biz")
            .title("Manager"),
        User::new(5)
            .name("Johnny Dietrich")
            .username("Kamren")
            .title("Manager"),
        User::new(3)
            .name("Clementine Bauch")
            .username("Samantha")
            .email("nathan@yesenia.net")
            .title("Designer"),
        User::new(2)
            .username("Antonette")
            .email("shanna@melissa.tv")
            .title("Engineer"),
    ]
}

pub fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}
