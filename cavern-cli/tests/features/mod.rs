mod explore_cavern;
