mod leaderboard_params;
