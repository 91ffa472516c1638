
mod test_enemy;
mod test_maze;
