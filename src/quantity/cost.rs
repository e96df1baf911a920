quantity!(Cost, suffix: "¤");
