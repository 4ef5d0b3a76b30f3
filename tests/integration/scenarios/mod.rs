mod daterange;
