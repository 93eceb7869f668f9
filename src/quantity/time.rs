quantity!(Years, suffix: "years", precision: 1);
