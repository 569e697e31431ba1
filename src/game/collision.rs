use super::snake::Snake;

/// Test whether the snake's head coincides with any of the cells behind it.
///
/// There are no walls, so this is the only way for the snake to die.  On a
/// wraparound board the snake can come back around and run into its own
/// tail; that counts the same as any other bite.
pub(crate) fn has_self_collision(snake: &Snake) -> bool {
    snake.tail().contains(&snake.head())
}
